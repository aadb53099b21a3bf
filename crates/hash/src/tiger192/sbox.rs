// Copyright 2025 Irreducible Inc.

//! The four Tiger S-boxes.
//!
//! Each 64-bit entry is split into a low and a high 32-bit half, and each half-table ships as a
//! base-91 literal of 256 little-endian words.

use hashkit_codec::base91::decode_box;

use super::word::Word64;
use crate::Error;

pub(super) const TABLE_LEN: usize = 256;

/// Low halves of `T1`, base-91 encoded little-endian words.
const T1_LO: &str = concat!(
	".iA}5<1U._y'8%lU&,U~gM{L[_UAgTPXyZ{EKz_Qf}r?]S%co_N<@xk4UBl{e=ldG9%f.~!s90(MJ2x@DAQszL%4",
	"/{jfT1h5+zmj4$&{*$HdzK+,u=<aib<;&.UX5~MVDv5X(tj%m:RFN-10.ddPx:^Z7<.CKne7R%N->d*b&17(tt1<",
	"hDReSM1rg?W;%mokk+vX=YcXV=%Z&*U9FFGH>uT^qrobgcKE^4ds7T{k~}npASSr]CDNGTbM=BYy,,,WR<ik<(H?",
	"hs^[Xb#h!?RAT5;6|pJD:aYGc59:55L[rcW.tBM1/lpQ#^1uzKhYz^pVSB*En+6X1bZYR~trfI;Adv2i^!+9xDGb",
	"/J/+[W%YD^GBRB!ItU*r['CFJ,,R^$NzlQyZ[i:~(BrdS6hfLAC%z1}YZ/vMvIq8[1Q,APi^GFH@/1{BI:M(Xm!m",
	"OBvagom>AoH#.+fln&wBY6j[?iW8;'A@:lP~>8gpSPjQp7#F{f3j*Sjl[M|qhl/<[dD&P#lklD^KXd/oE!SE2EwT",
	"ZTu*g=G@-H6]I~F/gkn{sbKUD)Nm6q@cp7RwqL{!lR%e!;u39kP>Aw6~m@WHHPkfhhW<=O)qvfi&GCdZblC@t^ak",
	"0lqK/>N<5^E#ty&S2/px7MZYbHnL+%fbRiU9i3r+2VkIpViD#>T{7>~sagbrWs%F1tga)K3~U&1a5shQx@/3V$]l",
	"nC*eaW+#%}:#b,rUZ7tmiZSUrNkH%?~8D~))i(i6xbXWZYhm<i;;RW%UN>zw=TlQIjYmJ[HkOwNrDd;gZQbwI6MQ",
	"vRTX|<5rl67qA7~}@~9T^Hu8W?OTK^yrm.Y[yoHu]OD5b<:<#W:DC1;D~$k9l'#sm.,/r,/p+hfm:e4edJspm+#o",
	"U]5k|F-'ms.QT{ay*1NEti5pH_-j@@^|nw$^gRE#}8m[>H+UflV!5c>?zBzSlQLrlbJme/2zlQ^C4Q*4^?E<J,_X",
	"{{,_s[sJfaMQe6P&>Gb9w7@{R?u,.h+Jq)EzM(&fC(7r'^rqSjm-lCv^g}AsB5N(7WsZ?_#h/Tjo%;<F3J%V:eAJ",
	"|zuU>s#JK6Q)Xk[BBV+3|^A.Vrx%?.rxo4SSHzhCL*2g<14Xn?:}jet/?Gsi-#nHLcszyXEs;5.qaMzYO]>d6H|L",
	"NP:XG1wTG+AO1ub}4k?;;WTw@oaD!n-fq=,BoVVoM+tsV'<|tKm/6'c}XpJ({Er.5/x)t*9y[U,#tC*J*M30v_;R",
	"5azl[)nNs-K@>X&RLtQwPEDVKh7A",
);

/// High halves of `T1`.
const T1_HI: &str = concat!(
	"RxB8KC]Mb;Unwf=zvEJ=I'u<s@4.^m&R_w-%.F!d^nC8iTAX-x{:H2lb7c:h7^?FZ!A#)XjNnwsR#Z<'Fc9zl.On",
	"x^PXM!Dvqq9vPKX.#L-T(B'.(]S'-li[?(LJ]zajdBt.%qD#,9gPFf(h*pAgYY1HxSV4KBD0s]sp('7P*MpIik9|",
	"zjG?rLo|c$,]:=#I_&p=QQKR*SL&X3.C(.rKAlhyUL-fdIq^:Q4e[-S!JU#H5w?{g7)=NVst^X|iC_wDQ@rx=Wy8",
	"#TfF&ub,gS&!(xP8TSTE9M3&2GKL_!h;ZNkc(^K_l7Rhui'g~dkJL}?d~2fl2mDPAY&=M/;GM_*qd0/;2VfOq~pD",
	"JdoSB7[v>sr>2Sv0_.vru^,l(g%nFXL9q2Uu|I@)gEOZN[:~,n5lTbh]U!%wWaY[Ja|p+H/t!ZC+RhZjNe5Bwv9f",
	"ST<th:~e'E4La+Vxc,un4|]hh50,^,L7OU*sD8oYMC0buS~uZ67q)*lr]$:OwEn&@6B{*y3zP6JB_wJahs>@ozB(",
	"BbDZlJh*%}uw%:E;ZqH^p&35*l:bExzys%Zzmi3&Sf(wr%7p=+f%yE'37&;&>R=H)kq'uudqFzT^LJAxn5XZ>;S7",
	"b'V,<9t&lLU<#c>880u?8:LE@rs;'4l'>)-M^A2].No2t|.SmOQxj%0Sqa2?+kTaU#TkZvKu&rOxYioCAA[=B>m+",
	"BK{wW.r_/7I0j#b^%}V_HRw[Y)FRqXjHF1>(z6]<c;zld1PY9nF&'1:GJ4!h@}bjnp.:tdA?gY+jwfs0H+sM,Mf?",
	"a7j=ElUPf_S1M_sNfTkb7F1'w'LC{cOfs0E)TH|07$]Z8O>Q,z!8:>DhO3A7y-z-B#8iM'u5!4-LTJ*F#OT7QDI&",
	"xkJ]f6l}Up^JeK7N$_wj_(ELZSR+d+88:J>x:Q$J@AS_hS:I|wM!l!e#r$~(19]4K/$LB4dnNe<y5e6=D(Pun^?v",
	"9Taz=bGaLw8M_jfhd~iK8Cf^2<XPSU(y*Me:st!HAo8%8.dESMH>%^$f#y<h3$-'Y##r0aHMGG,X$dj'!8rJpdC[",
	"qI;K;8uKs4r|>e#]a]i#kZFPV0+mo?VYgJL3LAct5dcEA?U.isM!oyjT@N+#Am&C#a]R9^RKd=?U->VG77Tp0nk)",
	"}?@[.>havg_e)jKc0}XS3#s[FF'.?]F5R;8v~wdv5,Z#@?,m)Uz$&1X68U(Q3jb%/[95}/QMF;:Y5B_?VKPI]#K<",
	"0WVm7<EG#0:~l{keqs7C%1B^E)1C",
);

/// Low halves of `T2`, base-91 encoded little-endian words.
const T2_LO: &str = concat!(
	"nD9k[Q)v:fq6ut_:V}BFTO92U}te8MzxQ'}j:bBPOB]#&i(skLHrAbf}wnVZS1$VD%o7?c,TbQ5o#X;EA4F?~Edb",
	"eto..dh,-XbbEw12E[XXP5efVn[n_Dk5^t.<R_C=w1Bj~'#][Dzk@tn]]Un@%Ghm[xzFqM7$%L%]c6!hS>oP>yfm",
	";d*g?dlDl*xW}=y]5'TrB%lND7kX0iMPB{SfafeJal.]FyyLh06*z.C.3RKYr@4<DixdT1UWm6hwB=+]Ye!Nx!yW",
	"s_.!PU=#~8@/^s&$LuY:;{NYE~Fx#)f9sn~%~,+INM)*rkxpuxH3]@r{}S^WB<8ubW5{+=+ou,LEy[qv*r2y9n*F",
	"wkq$T6iW,S/z9E1K8pu14ngK:^g%?eApZ2BO$cSfe*>8@Cw&Kd*/vv{'do_<E}|_/P%+tfCq2ihL{bMG8mYm.ADU",
	"VP7zy6KRTeOIGe@pJ0B8R:/]8RAgPI[7;.rMA=|h(fxG&kaMLO$m{e7[(}^&E%WXyd?M/'d+_rog<wR%$7M3*]}F",
	"b.HqIb]fF1n.U'x+n__!x8/$npDq&KU+]lx1x21&IN,CX#Ya7nzdk#sZAA.wL%l#ssrQ.d$@5kWXX@.ET|dXh2?i",
	"INE_k{w&W_oN;a#H69*STJ[Gfzk'EFX0pBEyf2RR+9%<|^k!ZxNg;.b,lB&GMo%Xb,E>NZcqz>):l1}$+H'C?8$*",
	"V6Q,Z@Z8omU}d0;|gL!$P9{FcHeU)?WL2{oTN@X;!pc0Y|j^s.[z5rb~UF%^%]sf1J*^f=Tr]b:eN=e|IRu;R:{!",
	"(hkZ?&by_u/'tr9UG9EnNwH+hMV.|@^DH*$0RYZRFP6ecIsIrng7^Jri$nHA|o7cDLgAL&6B,YQ18'w!LAMdcBk^",
	"Dj]9L,lFf^%vnhW{Mw0}uI2R|C}Au7Wqx@Yd3W<m2#$z<)+59w7vyb5k@eF#4VE~bY;bif<47UAm0vaywY4kB9d4",
	"IBAV8n6GhR5h67a8*XMzuiE}06]5#?,msk9Vtclw-]YJ]%z}-(f=A5PEbd!o4]qx#j98NS2=h<]<&/yk.,V+@z=n",
	"EPZqRSXJ$rVNdwXWTfh;]0V?,Y&7=4|!P4AD44Z6cxo]tTRUgUha$h6[j',H:vN$W,IN#0vdfYk,{2vr&De$@],h",
	"neYO76XnaL53aXt'U~nr/Yd</Hv7!h*#W~SS%5>?dk)p%M0|{n$)*NQS_gu.fy#zhbNxU(S(L4i<B5P%EHO>$1cw",
	"AVYv(FCe_S-Y}$iNET]n8BbBkJ)D",
);

/// High halves of `T2`.
const T2_HI: &str = concat!(
	"j'877ajG{<*tP+aQKTU:Wg)zVo#7O?u6:%7h;{Hm^?#r63:]!N6&R>&_}YQ?*&f62c{G;cm?;os?ezgh{OESaS4x",
	"#{NuzNmssh_E5kPX&,st$'_/nI!pW7RLxF}B6=xvK%wZaxR|.nn+lHRI#?}]QN7V|r>*#*^N%xt{GZz:lD~W}Usw",
	"<).Zv6g//_7.(Ny&b~{t!]%g3/:x&D'~z]SsqlfdwZNG]IXP~N;Tgx:;3/vP'PR)W>hJ5#GSi-H0p#C?:lzbErAS",
	"p4/8EsX9WcbBQ~0kS(ncPpRJ{q8H#PanKU,rB&z,*9=+VoHA2C[HSy9c+l<vm?OhP^t^d<gx6*5vMYO%n~b=3Un$",
	"CQ.2RQ.o:/)kcw<60u'@0JN4$l)o<h)d%,?S|@$~}k~(EvlQ;R-!|;ZH9jqLQ^~G5=V9Q.}<M6G.X.B,5ImcXW#E",
	"O9hX]mJs'()[Y_~VjYoNR*=z~[y=z@'VgpMZ!$w=@<l)6x,O2qz*4t&>kN)20xX&0Tz5R!tCbi3/qSgFaRpbeO=>",
	"eI]j>=C{-N[%nu%NAFy$0>6;q!@)L*6(eU_~nlB{ZQQ5IBm7OI,:z]H8,Cd'@@ua.=hu~5:,2W)!QCqk0HL*<6AV",
	"2B^'kT}!A+w]nI0[W_gjV+0e'@'N'd1XFuqZ',%$o1}D8]D'+%m)>3:<A)Jv9Lc[troC|yt7L.yF*yJYUu*$#I#P",
	"PVowlP48.Lv]^!Od0e^~#I@Gq6;uTot2X8QPqa!uQi%%!,URohI0<a^fcw[JP}>V!.!_Q^E<>II;5&94&L'@v6gd",
	"}q7w?C02!*9Nm=-E5FM?7Kqt)Zk)b5$E.]!EJ'x~OssIvK6{4JnOudxchWVoX}+mZ[HkdFmh@'m)Z!FXBDpMcxU[",
	"_iHWI>3rla,kzvJO*F$~$<Ie_tIS2n,oBK,Zmt}jHOc'>|wjGdU^!9(3quoOE%L&14A4jAppE!A%ZL#$-C+zU{^?",
	"z7S]we8f$U^i]P]$o!o%.C<>PNWWS>#O~FRH]He?Rphar=F7-&qd1K[SkYhZ~1wqq*DP+,-T1{Da2ruX[,2!Uclv",
	"|zqodtt3W(]}&<fuUuZN5(x#tLJJZ2Rupxs&dF+Z)kj1[=#P}aFSrv1v#N!6jUtfVm<~Q9UPZgL1/0{<p*v%1Tmr",
	"GB.$hCPZ5mS|u[9JSPoX5Z)<9<n[F(jwcAK*33^,LcVsBJIC2a,Udm0%*|w&dp1/uf)G>/tU]1Es*w:+Ur+y?4pR",
	"(Yp/k0GQ7ZqBHn9s%66%h*j1X;GD",
);

/// Low halves of `T3`, base-91 encoded little-endian words.
const T3_LO: &str = concat!(
	"O3)phBrO#$34$2OjD[y#CqlWDSx)R4~z>$-21+YrS']@BB}{DBXQzn.eR*dHFe%?Hxr;7{tG3@}}ybL6MuUX|SZo",
	"9QdM|@.gi#qT4)(F5wG^oGI;9Wh:j!7*47t%Wf7tWmmr)B@mt)5,t@2EIhw5Uv}Qs>Kp)l8Y7zGJ}U8XTdd2B,fQ",
	"&MhGnDx,&XtR{rwwVy&,m<G|NqUiQwE9Q7frJRO^4}1]GuA_c1p(T3aQJTL[i8jkEdnGRWh(i)F:PGX5N?WX*J<D",
	"ri<TP~D8%<xoQ&:(jB#I6F?I+g5FNL7w^6c'?X>2J$l%zNi87!1<'&Ee/gM416,xCU|T$b1VSqhe-8gxrN?XnJ&9",
	"+|PA&t+7|&gSA1xmzZIT{!/Dv03G=R;+?/jOu%QKyxf7]]Bf{,O4.;tW}_#[v<i$w8^eG<1f;P1$JeK{:InN*C}%",
	"W7HVs4,w(l_)rp7vXSXF^tgy}w:q*+wp8,jst[Hr)D?|HE{!QyZzCW(#No<lu$dcW0mz]0;jxbJSqEDNO[ZwH#Rn",
	"R&W3wy7alOyI{{S8Wvn:lhBv+2^_&4bBQX3op4Qa(^L]Jc(g3FmCj+&qLur/w-:fzuK2,W3$:eGLnCws.GkK_&1>",
	"{1}vEU]YZ(rK_rr^W[OB'w@rD[isg6q;G,>1z#byz!c8cTfnq9{#kf*E#^D%oF{3%d4*zwnE,EVd2IFy|BF'?l{t",
	"PaDIG]I4rMd==A2+zr6k,0Rq8s90N5G)bNA((gO2@8Q_sr|(j8pIPh$ttn|hGR{'-ij6r)mSbg5!*7Vva99y|T~f",
	"eF9fD2NOc]jf~GwCV]D5~SN7DyR)UU$(@_|K1Q.t+(|yKp)9^.SFB{{u3%](>Fayuwvcst*jpkL]D_m,_W5.7KPo",
	"B<]31~Pdsbxw%qeP98%91(g&tR7<vd[W.OIdQU!v3D}iAWH^.jx@q+6XZVW$WT(bS_#}jZ=E65&tekc<j(:iT!bW",
	"PqY<=cx^q013%lEe^vTc%NWX|?IyEy>'M=%[5g2Fw[umJ5@dYJa51Iqeqnhjg/9a3l*ANY+qs?Su^6Y9E$FNL+R.",
	"KF;duRdlltescqRc>xXx22gdj@?l>04sfa~BS[-PCw.nuLn7{)(oaZ9cGPMHa*b:wxA#'6O,tD@Fk*h{IOb[d&1u",
	"Un=~;,8xyWq^JQ!Szd5z-ZRnrScep)Ab-[C[Tt9GySrQsE.!aNTG1#B{,Q/*xn-'6!ambmWfv>!'-Q6jgP$o.rxH",
	"LiM6dK(WGF|9gUzN2R%Vv,33U&PR",
);

/// High halves of `T3`.
const T3_HI: &str = concat!(
	"ZiEO]xI~)5AJPHN@,<n,[^85H]}ufN6?=CvK/2oPgFIW5W)DCvj)P7=8dsXQ'/B1]Dm8~$Za@F3UnkQS'c5r2Hq<",
	"rnUg:cz(W4A*P||^G<t;@FrcNK@c8z/~i2wz*eqCcL1s(N0CZeX;W6X)C3T}p>?u=I<n&'qd@u9d@5C^z[ptT?}L",
	"r4zbB3M,t?my(f#kTN=1,>R;+~j[4iYpfv'uP2G(u+oRjJ%rIwljp%',gc)Jd;CvI)IZr%>lrBf_P^9cYaaHvJsx",
	"nd0=T-!f9=d0|k:ksjT7u=:)'H]Xk%{$08XR(|h^m9^9/VHQ$.>rSJuGN/<jIB9%DZb!;{^sijF$tOd}:Gv3;{^G",
	"zKLiJHuC>s{|DS5zRwd_<wN{d=QgKeo)LrafS)Qs+I0t)UXj2cM+sl1$PB;u6zU_KjfB!6Ufak@u>wB.P5IdLT:(",
	"=/T*o*3FTGF.L,89(|BWgy)lY*Z@I)}tOR$x3=Ba-mcNSLiD_V(Z!NCmG:ITp4%2S~k,StIw&zyLvs}lr8O;fcQ]",
	"vrumEsx.Q?*@|qma%^@rcg^l:,h'V>ooiPVsUPzR50@!9LhAYS&,i24A]zy&mX4VJ)OZ[g+ICrIx]_$k[b9iV5@q",
	"s3UL2Y<CrXCtzha|KZ(?D@1uEM]IlpiFxYu6sLMsOzU[XQrjhP9e,Tgf(eD1j#^JQ&s#dxh@ZyUG<a~J>Gpa.S0G",
	"?'?*Lc[~Pm8eT;;>Nu5k}P6p'a)9HHve;MyTdT!7U?E662X$K|5'(wCgM_]h5KyWvcuQb07pPqP&'=(i3bC-TXp[",
	";TZccRiCS0^RgeYm)%kD?8;5%>mQY}tm(nBFf!&mIE7+$DY,#YoE!|pNpZazA8kI-U&Q&&mwzNf9]ytB}@?8MTUM",
	"DPc*U]l%5{ckcv*Hbs7bv2a]PY]hB*cST>%J]MFH>Qycn,pVdC!SW028n'X![HO1(VOb-<bBiJ7s%*eVROPaaKSh",
	"1.8M<hT.B{'rd6r9Z7w1(YJ<J>6p|5<O.]3)e*(3>FCVHNFAxdlg$(rg-*{uA1_j.mg9yD(CFQ_XA=S|fKz|hHXQ",
	",N5PPxi#D*hep&dn>r1<8CP0c8d#)Zki'<@l}/ReNj)LznR][X[l2=r7+H~zot)aO/b$Ca+DvWXT<q'sowZni63a",
	"Ar2R6m?*@#k4^r4Jn]5@FtJm3}~[g=;2smfo%4V4^5q0q!6#BRzblwbFiuO.f;_~<3bP*l0.j+7.(T71w*Az|f[}",
	"I<D)08Z{j(47*Zr[Z/Nq%VUrUU.E",
);

/// Low halves of `T4`, base-91 encoded little-endian words.
const T4_LO: &str = concat!(
	"$?mxj]>#}rrWiw+;XaZ$1h{?Z5WY##wD,#-~L|%jJka!^x8gH|d#L|mh{,mJ7)N3OB4TetTFl)~Oib)ZEEfvG+M&",
	"^I)GYn>F:e8zPDSaFcG$~Jj>D2DTT,R~|c5_qNiIfSevF}(FSwpW2v1tiA/qrwZ}Z&C.{5m./p!-$LAt17_nL^27",
	"yi8a&0O?fj(CDT*H)H.]g(I.y~h|UEw(l?=b)]Mg[>@s~R*JX^4_&X%wxI%+M}Cw)}u,mS*[!@c6cl*M|Z/_f_Y&",
	"ksdDLed/:~J2LI9IzzvjN)W9:7FI!Ga+%.r0c8/xiFFKO,4o<H${n%BB(Ii,@N]4Yrro?YL<{vip+wW)7Ujucmff",
	"&$H/!2np]5L&m>9BSh9$)<+8S0V/j&dZAw%rcd97k('*=horhP;<Fa(&>WUqJw91S;IRrQb.0p:g6|&F+!B/U_~q",
	"4;tIW[+lGj9[F48*8[$_cCI,-lN+U:T(S<BN/z4od%K#PSgfA}4t|2_Bazd!u*h|&uKIF.YApiOWD8'^&yb8+I_,",
	"K5X)6!gF@rYthLv6G,V-9^q;LW:/$jN)W]x'Q*|'ynua6C35C*G%)[h}Onz.?q)A&#C2D|1k':6D+T#VT5lXnqL[",
	"w].x53GX,^!!H'(GuVWu!2wmjm{KQV}?$+v0z{$o@=MdMzCy1cT4F[Bt-Bet.t-92//$Wz0+j2Zg#sN)9#w?PbXw",
	"N,n4W$>}+%YeIjQ<&k'$jbh$5lK,l<Kf_i9',OzW5K^J=n4.})X3D?cS|z4'ghd/7Y{Yd%#oZy/[TSqVuALo)o4H",
	"[]+IIZi6z0doLA%!&ZD=/zU'E7zh+U@/+<%5Cy0UctT0o+leWby46d]9N(EJ!f=(@&~MOJ'aE|c2F_t~7lrhth=S",
	"Xq(p5'gFZAb$#!Gwc;=a[V-i2G?r}qIVh_(%0<)^yBMLlqf2H;=@03=6<&<iIjci]>>m#5w/_Z0ae.i&UIpH%}9Q",
	"-6Dww,ltEFh'}*GzoMXLNmPw[{VVXMmYs]=47~Z9E[LL?SLxjtwUO=AR]eW9dXZ3tf6D)g=-zh~0?y3EBd5C{z>|",
	"H6_kqx8i*09jGvs(m%(FC!<:I]Ad@pBmi*&+0d!&vfMKx&lX7ZnFe'x_l.STSc'7yci,1s,/EX]s0DxWZF95ovCa",
	"b2Q{jFd&)93Qn&sQ@$U9-ChrH|=jjjGh|#)PTSl'*XrRqZRe#v(k(&M*9dC|O,i59N45;|U=]WfS5,A&n}[7MW3J",
	"B)AD11XovDcKUC+9kfDhJolOZ<cA",
);

/// High halves of `T4`.
const T4_HI: &str = concat!(
	"qB,)HdBm5x^HSVwfCd|1gH{gP(P8Tck|S0e0xVlUf_aE[.P#9*Z#m3)_NrOD'f^D-Q,~]JuxP$!zc<Vf_Ly1of0Z",
	"Ki-xdr.~6~pe><S}ldevI5D|<Y&>K}JA^K5wd]7Bo2[8>)k^~+ZRSbDy2)oxi&N]6*GEG>FkL~j0:$GegJI|tx*v",
	"!e<yU:)%x~6V}m*56mEJw?Mt4noL/+]~#9iF63Yo1(a;0~RB^p4c6<I_XxM!L<C9ef&{_P%.$32JLX!Or7dnEZy_",
	"z3GJ%~^[=ZSjLP8#u+O)d?DES0?j,(*P@Z%<[I8lVE13ac?,iQBB(4e&d1Q8-l'U+,Hi>F4^ovnmNWf27ziOjy9_",
	"A5tqw!C2zq=$ruBe7X?u:C?N=j*z}6}(XEM+='<rbKgQ*N@7GPM6}{~Ln:2is)@*CW2*))6%mu^q0,&s$ZoCqW3A",
	"_}u[=_(O4=6d^x^>HG[aZQ1w<tMS#Q5ud?i)N982apT3?Ol:i]NsCOc=X)0}z%:D$2A?JC}{[MvstS>Zuh1{Ahl*",
	"?A=~LLYcArjNB#;j1J,}zvKX:h{QD9{YioB39NmCV*t^$,#h&.un6ZL1jGaC}54(Lh3:tAxCg/e|7DzvXnR,{cV+",
	"XY6X@2=|Z0j(M>ft|n(wqsXy}2|v$~(>]flJFh[3~q9cX8SGU0!wP|[J+L2<Mji5s$N:=[?+73t'm)!L}X7rvQXf",
	"g%-/=P^HM<$jBK,#h~d;=VE|nYsF!U*uq@gt_/!Y&)f1dSA+f</L&]7}7$sqkJ,K4~>*P&Y%6c|Q>XRp-/}8d>[T",
	"?q*13J:zA/i]z}T~.7nJ)&u=N;I~=*Tll267:YUA1d9^T2_n_YL#qRoH/.3SZpYMolLM=2zO%{Qdj)9F_vpQ)XS#",
	"d'3=Kn4%[-v59ky(npTn{c.q_)x'JS2__Xg:[#2z92@+8,N#)+JZ-2!=jTR??H6*m$Xpc^}]AN#%i^N*5UV5b2dR",
	"T5X9|EuL2LKJ9kjs0!?M%{{VPckd')V~+C^d4'xeZ=?;UF4epwdX5Ms9VR&gAhfX(OZhZ+ccS_7(F+IW7.Z3bnS$",
	"pd4K_@YNY[U/h>TPCfj#Ah{|fo,YII6N8lwu~X&wPgIQca>Y'BG2pYMwcGe+Wj8)juO9=5pDleuW)cP}cb+A[{x@",
	"auo~Xh?+vu]<U/<m]mq:lpgp;qO>U8P:2?cfv]vL9Zvf[ho{fjdyls0h=EX5-1PLQv?DR1bE^X$6+)w^g']y%F{E",
	"O!$UkS_rk<vlrpma?JdGwLPQf4NC",
);

const ENCODED: [(&str, &str); 4] = [(T1_LO, T1_HI), (T2_LO, T2_HI), (T3_LO, T3_HI), (T4_LO, T4_HI)];

/// Decoded S-boxes `T1..T4`.
#[derive(Debug, Clone)]
pub(super) struct SBoxes([[Word64; TABLE_LEN]; 4]);

impl SBoxes {
	#[tracing::instrument(level = "debug")]
	pub(super) fn decode() -> Result<Box<Self>, Error> {
		let mut tables = Box::new(Self([[Word64::ZERO; TABLE_LEN]; 4]));
		for (table, (lo, hi)) in tables.0.iter_mut().zip(ENCODED) {
			let lo = decode_box::<TABLE_LEN>(lo)?;
			let hi = decode_box::<TABLE_LEN>(hi)?;
			for (entry, (lo, hi)) in table.iter_mut().zip(lo.into_iter().zip(hi)) {
				*entry = Word64::new(lo, hi);
			}
		}
		Ok(tables)
	}

	/// Entry `index` of table `T{table + 1}`.
	#[inline]
	pub(super) fn lookup(&self, table: usize, index: u8) -> Word64 {
		self.0[table][index as usize]
	}
}
